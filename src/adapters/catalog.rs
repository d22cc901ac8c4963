//! Read-only catalog of the supported type names, grouped for discovery.

use crate::adapters::type_registry::DataType;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DataTypeInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

impl DataTypeInfo {
    /// The registry entry this catalog entry documents
    pub fn data_type(&self) -> Option<DataType> {
        DataType::from_name(self.name)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DataTypeCategory {
    pub icon: &'static str,
    pub name: &'static str,
    pub types: &'static [DataTypeInfo],
}

const fn info(
    name: &'static str,
    description: &'static str,
    example: &'static str,
) -> DataTypeInfo {
    DataTypeInfo {
        name,
        description,
        example,
    }
}

pub static DATA_TYPE_CATEGORIES: &[DataTypeCategory] = &[
    DataTypeCategory {
        icon: "🧑",
        name: "Personal Information",
        types: &[
            info("name", "Full name", "John Doe"),
            info("firstName", "First name only", "John"),
            info("lastName", "Last name only", "Doe"),
            info("email", "Email address", "john.doe@example.com"),
            info("phone", "Phone number", "+1-555-123-4567"),
            info("avatar", "Avatar image URL", "https://avatars.githubusercontent.com/u/1"),
        ],
    },
    DataTypeCategory {
        icon: "📍",
        name: "Location",
        types: &[
            info("address", "Street address", "123 Main Street"),
            info("city", "City name", "New York"),
            info("country", "Country name", "United States"),
            info("zipCode", "Postal code", "10001"),
        ],
    },
    DataTypeCategory {
        icon: "🏢",
        name: "Business",
        types: &[
            info("company", "Company name", "Tech Corp Inc."),
            info("jobTitle", "Job position", "Senior Developer"),
        ],
    },
    DataTypeCategory {
        icon: "🆔",
        name: "Identifiers",
        types: &[
            info("uuid", "UUID v4 format", "550e8400-e29b-41d4-a716-446655440000"),
            info("id", "UUID identifier", "7b3c2f1e-9d4a-4c8b-a5e6-1f2d3c4b5a6e"),
            info("mongoId", "MongoDB ObjectId", "507f1f77bcf86cd799439011"),
        ],
    },
    DataTypeCategory {
        icon: "🔢",
        name: "Numbers",
        types: &[
            info("number", "Random integer (1-1000)", "42"),
            info("price", "Price/amount", "19.99"),
            info("rating", "Rating score (1-5)", "4.5"),
            info("smallNumber", "Small integer (1-100)", "23"),
            info("bigNumber", "Large integer (1000-1000000)", "123456"),
            info("float", "Decimal number (alias: decimal)", "314.15"),
        ],
    },
    DataTypeCategory {
        icon: "📅",
        name: "Date & Time",
        types: &[
            info("date", "Recent date (ISO)", "2025-01-15T10:30:00.000Z"),
            info("dateTime", "Date with time", "2025-10-10T14:25:30.000Z"),
            info("past", "Past date", "2020-05-20T08:15:00.000Z"),
            info("future", "Future date", "2026-12-31T23:59:59.000Z"),
        ],
    },
    DataTypeCategory {
        icon: "✅",
        name: "Boolean",
        types: &[info("boolean", "True or false", "true")],
    },
    DataTypeCategory {
        icon: "💬",
        name: "Text Content",
        types: &[
            info("title", "Article/post title", "Getting Started with React"),
            info("sentence", "Single sentence", "The quick brown fox jumps."),
            info("paragraph", "Text paragraph", "Lorem ipsum dolor sit amet..."),
            info("text", "Long text content", "Lorem ipsum dolor sit amet, consectetur..."),
            info("word", "Single word", "hello"),
            info("words", "Multiple words", "hello world example"),
        ],
    },
    DataTypeCategory {
        icon: "🛍️",
        name: "E-commerce",
        types: &[
            info("productName", "Product name", "Wireless Bluetooth Headphones"),
            info("productDescription", "Product details", "High-quality sound with noise cancellation"),
            info("category", "Product category", "Electronics"),
            info("color", "Color name", "navy blue"),
            info("tags", "Array of tags", r#"["electronics", "audio", "wireless"]"#),
        ],
    },
    DataTypeCategory {
        icon: "🌐",
        name: "Internet",
        types: &[
            info("url", "Website URL", "https://example.com"),
            info("username", "Username", "john_doe_123"),
            info("domain", "Domain name", "example.com"),
            info("ip", "IP address", "192.168.1.1"),
        ],
    },
    DataTypeCategory {
        icon: "📊",
        name: "Status & State",
        types: &[
            info("status", "Generic status", "active"),
            info("orderStatus", "Order state", "shipped"),
        ],
    },
];

/// Every catalog entry, in category order
pub fn all_data_types() -> impl Iterator<Item = &'static DataTypeInfo> {
    DATA_TYPE_CATEGORIES
        .iter()
        .flat_map(|category| category.types.iter())
}

/// Entries whose name or description contains `query`, ignoring case
pub fn search_data_types(query: &str) -> Vec<&'static DataTypeInfo> {
    let query = query.to_lowercase();
    all_data_types()
        .filter(|info| {
            info.name.to_lowercase().contains(&query)
                || info.description.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_entries_resolve_in_registry() {
        for info in all_data_types() {
            let data_type = info.data_type();
            assert!(data_type.is_some(), "{} is not a registry type", info.name);
            assert_eq!(data_type.map(|t| t.canonical_name()), Some(info.name));
        }
    }

    #[test]
    fn test_catalog_covers_registry_except_aliases() {
        let listed: HashSet<DataType> = all_data_types().filter_map(|i| i.data_type()).collect();
        for data_type in DataType::ALL {
            if *data_type == DataType::Decimal {
                continue;
            }
            assert!(listed.contains(data_type), "{:?} missing from catalog", data_type);
        }
    }

    #[test]
    fn test_catalog_has_eleven_categories() {
        assert_eq!(DATA_TYPE_CATEGORIES.len(), 11);
        assert_eq!(DATA_TYPE_CATEGORIES[0].name, "Personal Information");
        assert_eq!(all_data_types().count(), 43);
    }

    #[test]
    fn test_search_by_name_and_description() {
        let names: Vec<&str> = search_data_types("NAME").iter().map(|i| i.name).collect();
        assert!(names.contains(&"firstName"));
        assert!(names.contains(&"username"));
        assert!(names.contains(&"domain"));

        let names: Vec<&str> = search_data_types("postal").iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["zipCode"]);
    }

    #[test]
    fn test_search_empty_query_matches_everything() {
        assert_eq!(search_data_types("").len(), all_data_types().count());
        assert!(search_data_types("no such thing").is_empty());
    }
}
