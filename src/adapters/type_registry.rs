use crate::adapters::vocabulary::{
    COLORS, DEPARTMENTS, NOUNS, PRODUCTS, PRODUCT_ADJECTIVES, PRODUCT_AUDIENCES,
    PRODUCT_FEATURES, PRODUCT_MATERIALS,
};
use crate::domain::ValueKind;
use chrono::{Duration, SecondsFormat, Utc};
use fake::faker::address::en::{BuildingNumber, CityName, CountryName, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{DomainSuffix, SafeEmail, Username, IPv4};
use fake::faker::job::en::Title as JobTitle;
use fake::faker::lorem::en::{Paragraph, Sentence, Word, Words};
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Value};

pub const STATUS_VALUES: &[&str] = &["active", "inactive", "pending", "completed"];

pub const ORDER_STATUS_VALUES: &[&str] =
    &["pending", "processing", "shipped", "delivered", "cancelled"];

const DAY_MS: i64 = 24 * 60 * 60 * 1000;
const YEAR_MS: i64 = 365 * DAY_MS;

/// Every type name the registry knows. Anything else goes to the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    // Personal
    Name,
    FirstName,
    LastName,
    Email,
    Phone,
    Avatar,

    // Location
    Address,
    City,
    Country,
    ZipCode,

    // Business
    Company,
    JobTitle,

    // Identifiers
    Uuid,
    Id,
    MongoId,

    // Numbers
    Number,
    Price,
    Rating,
    SmallNumber,
    BigNumber,
    Float,
    Decimal,

    // Date/Time
    Date,
    DateTime,
    Past,
    Future,

    Boolean,

    // Text
    Title,
    Sentence,
    Paragraph,
    Text,
    Word,
    Words,

    // E-commerce
    ProductName,
    ProductDescription,
    Category,
    Color,
    Tags,

    // Internet
    Url,
    Username,
    Domain,
    Ip,

    // Status
    Status,
    OrderStatus,
}

impl DataType {
    pub const ALL: &'static [DataType] = &[
        DataType::Name,
        DataType::FirstName,
        DataType::LastName,
        DataType::Email,
        DataType::Phone,
        DataType::Avatar,
        DataType::Address,
        DataType::City,
        DataType::Country,
        DataType::ZipCode,
        DataType::Company,
        DataType::JobTitle,
        DataType::Uuid,
        DataType::Id,
        DataType::MongoId,
        DataType::Number,
        DataType::Price,
        DataType::Rating,
        DataType::SmallNumber,
        DataType::BigNumber,
        DataType::Float,
        DataType::Decimal,
        DataType::Date,
        DataType::DateTime,
        DataType::Past,
        DataType::Future,
        DataType::Boolean,
        DataType::Title,
        DataType::Sentence,
        DataType::Paragraph,
        DataType::Text,
        DataType::Word,
        DataType::Words,
        DataType::ProductName,
        DataType::ProductDescription,
        DataType::Category,
        DataType::Color,
        DataType::Tags,
        DataType::Url,
        DataType::Username,
        DataType::Domain,
        DataType::Ip,
        DataType::Status,
        DataType::OrderStatus,
    ];

    /// Case-insensitive lookup
    pub fn from_name(name: &str) -> Option<Self> {
        let data_type = match name.to_lowercase().as_str() {
            "name" => DataType::Name,
            "firstname" => DataType::FirstName,
            "lastname" => DataType::LastName,
            "email" => DataType::Email,
            "phone" => DataType::Phone,
            "avatar" => DataType::Avatar,
            "address" => DataType::Address,
            "city" => DataType::City,
            "country" => DataType::Country,
            "zipcode" => DataType::ZipCode,
            "company" => DataType::Company,
            "jobtitle" => DataType::JobTitle,
            "uuid" => DataType::Uuid,
            "id" => DataType::Id,
            "mongoid" => DataType::MongoId,
            "number" => DataType::Number,
            "price" => DataType::Price,
            "rating" => DataType::Rating,
            "smallnumber" => DataType::SmallNumber,
            "bignumber" => DataType::BigNumber,
            "float" => DataType::Float,
            "decimal" => DataType::Decimal,
            "date" => DataType::Date,
            "datetime" => DataType::DateTime,
            "past" => DataType::Past,
            "future" => DataType::Future,
            "boolean" => DataType::Boolean,
            "title" => DataType::Title,
            "sentence" => DataType::Sentence,
            "paragraph" => DataType::Paragraph,
            "text" => DataType::Text,
            "word" => DataType::Word,
            "words" => DataType::Words,
            "productname" => DataType::ProductName,
            "productdescription" => DataType::ProductDescription,
            "category" => DataType::Category,
            "color" => DataType::Color,
            "tags" => DataType::Tags,
            "url" => DataType::Url,
            "username" => DataType::Username,
            "domain" => DataType::Domain,
            "ip" => DataType::Ip,
            "status" => DataType::Status,
            "orderstatus" => DataType::OrderStatus,
            _ => return None,
        };
        Some(data_type)
    }

    /// The documented spelling users write in schemas
    pub fn canonical_name(&self) -> &'static str {
        match self {
            DataType::Name => "name",
            DataType::FirstName => "firstName",
            DataType::LastName => "lastName",
            DataType::Email => "email",
            DataType::Phone => "phone",
            DataType::Avatar => "avatar",
            DataType::Address => "address",
            DataType::City => "city",
            DataType::Country => "country",
            DataType::ZipCode => "zipCode",
            DataType::Company => "company",
            DataType::JobTitle => "jobTitle",
            DataType::Uuid => "uuid",
            DataType::Id => "id",
            DataType::MongoId => "mongoId",
            DataType::Number => "number",
            DataType::Price => "price",
            DataType::Rating => "rating",
            DataType::SmallNumber => "smallNumber",
            DataType::BigNumber => "bigNumber",
            DataType::Float => "float",
            DataType::Decimal => "decimal",
            DataType::Date => "date",
            DataType::DateTime => "dateTime",
            DataType::Past => "past",
            DataType::Future => "future",
            DataType::Boolean => "boolean",
            DataType::Title => "title",
            DataType::Sentence => "sentence",
            DataType::Paragraph => "paragraph",
            DataType::Text => "text",
            DataType::Word => "word",
            DataType::Words => "words",
            DataType::ProductName => "productName",
            DataType::ProductDescription => "productDescription",
            DataType::Category => "category",
            DataType::Color => "color",
            DataType::Tags => "tags",
            DataType::Url => "url",
            DataType::Username => "username",
            DataType::Domain => "domain",
            DataType::Ip => "ip",
            DataType::Status => "status",
            DataType::OrderStatus => "orderStatus",
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            DataType::Number | DataType::SmallNumber | DataType::BigNumber => ValueKind::Integer,
            DataType::Price | DataType::Rating | DataType::Float | DataType::Decimal => {
                ValueKind::Float
            }
            DataType::Date | DataType::DateTime | DataType::Past | DataType::Future => {
                ValueKind::Timestamp
            }
            DataType::Boolean => ValueKind::Boolean,
            DataType::Tags => ValueKind::StringArray,
            _ => ValueKind::String,
        }
    }

    /// Draw one value. Each call is independent of every previous call.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Value {
        match self {
            // Personal
            DataType::Name => json!(Name().fake_with_rng::<String, _>(rng)),
            DataType::FirstName => json!(FirstName().fake_with_rng::<String, _>(rng)),
            DataType::LastName => json!(LastName().fake_with_rng::<String, _>(rng)),
            DataType::Email => json!(SafeEmail().fake_with_rng::<String, _>(rng)),
            DataType::Phone => json!(PhoneNumber().fake_with_rng::<String, _>(rng)),
            DataType::Avatar => json!(format!(
                "https://avatars.githubusercontent.com/u/{}",
                rng.gen_range(1..=99_999_999u32)
            )),

            // Location
            DataType::Address => json!(format!(
                "{} {}",
                BuildingNumber().fake_with_rng::<String, _>(rng),
                StreetName().fake_with_rng::<String, _>(rng)
            )),
            DataType::City => json!(CityName().fake_with_rng::<String, _>(rng)),
            DataType::Country => json!(CountryName().fake_with_rng::<String, _>(rng)),
            DataType::ZipCode => json!(ZipCode().fake_with_rng::<String, _>(rng)),

            // Business
            DataType::Company => json!(CompanyName().fake_with_rng::<String, _>(rng)),
            DataType::JobTitle => json!(JobTitle().fake_with_rng::<String, _>(rng)),

            // Identifiers
            DataType::Uuid | DataType::Id => json!(uuid_v4(rng)),
            DataType::MongoId => json!(mongo_object_id(rng)),

            // Numbers
            DataType::Number => json!(rng.gen_range(1..=1000i64)),
            DataType::Price => json!(round_to(rng.gen_range(1.0..=1000.0), 2)),
            DataType::Rating => json!(round_to(rng.gen_range(1.0..=5.0), 1)),
            DataType::SmallNumber => json!(rng.gen_range(1..=100i64)),
            DataType::BigNumber => json!(rng.gen_range(1000..=1_000_000i64)),
            DataType::Float | DataType::Decimal => json!(round_to(rng.gen_range(0.0..=1000.0), 2)),

            // Date/Time
            DataType::Date | DataType::DateTime => json!(timestamp_offset_ms(rng, -DAY_MS, 0)),
            DataType::Past => json!(timestamp_offset_ms(rng, -YEAR_MS, -1000)),
            DataType::Future => json!(timestamp_offset_ms(rng, 1000, YEAR_MS)),

            DataType::Boolean => json!(rng.gen_bool(0.5)),

            // Text
            DataType::Title => json!(title(rng)),
            DataType::Sentence => json!(Sentence(4..10).fake_with_rng::<String, _>(rng)),
            DataType::Paragraph => json!(Paragraph(3..7).fake_with_rng::<String, _>(rng)),
            DataType::Text => {
                let count = rng.gen_range(2..=4);
                let paragraphs: Vec<String> = (0..count)
                    .map(|_| Paragraph(3..7).fake_with_rng::<String, _>(rng))
                    .collect();
                json!(paragraphs.join("\n"))
            }
            DataType::Word => json!(lorem_word(rng)),
            DataType::Words => json!(Words(3..4).fake_with_rng::<Vec<String>, _>(rng).join(" ")),

            // E-commerce
            DataType::ProductName => json!(format!(
                "{} {} {}",
                pick(rng, PRODUCT_ADJECTIVES),
                pick(rng, PRODUCT_MATERIALS),
                pick(rng, PRODUCTS)
            )),
            DataType::ProductDescription => json!(format!(
                "The {} {} {} with {}, designed for {}.",
                pick(rng, PRODUCT_ADJECTIVES).to_lowercase(),
                pick(rng, PRODUCT_MATERIALS).to_lowercase(),
                pick(rng, PRODUCTS).to_lowercase(),
                pick(rng, PRODUCT_FEATURES),
                pick(rng, PRODUCT_AUDIENCES)
            )),
            DataType::Category => json!(pick(rng, DEPARTMENTS)),
            DataType::Color => json!(pick(rng, COLORS)),
            DataType::Tags => {
                let count = rng.gen_range(2..=5);
                let tags: Vec<&str> = (0..count).map(|_| pick(rng, NOUNS)).collect();
                json!(tags)
            }

            // Internet
            DataType::Url => json!(format!("https://{}", domain_name(rng))),
            DataType::Username => json!(Username().fake_with_rng::<String, _>(rng)),
            DataType::Domain => json!(domain_name(rng)),
            DataType::Ip => json!(IPv4().fake_with_rng::<String, _>(rng)),

            // Status
            DataType::Status => json!(pick(rng, STATUS_VALUES)),
            DataType::OrderStatus => json!(pick(rng, ORDER_STATUS_VALUES)),
        }
    }
}

/// What a field's type name resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGenerator {
    Typed(DataType),
    /// Unknown or non-string type name: a single lowercase word
    Fallback,
}

impl FieldGenerator {
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldGenerator::Typed(data_type) => data_type.kind(),
            FieldGenerator::Fallback => ValueKind::String,
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Value {
        match self {
            FieldGenerator::Typed(data_type) => data_type.generate(rng),
            FieldGenerator::Fallback => json!(lorem_word(rng)),
        }
    }
}

/// Process-wide, read-only mapping from type names to generators.
pub struct TypeRegistry;

impl TypeRegistry {
    pub fn lookup(type_name: &str) -> Option<DataType> {
        DataType::from_name(type_name)
    }

    /// Never fails: names the registry does not know get the fallback.
    pub fn generator_for(type_name: &str) -> FieldGenerator {
        match Self::lookup(type_name) {
            Some(data_type) => FieldGenerator::Typed(data_type),
            None => FieldGenerator::Fallback,
        }
    }

    pub fn resolve<R: Rng + ?Sized>(type_name: &str, rng: &mut R) -> Value {
        Self::generator_for(type_name).generate(rng)
    }

    pub fn type_names() -> impl Iterator<Item = &'static str> {
        DataType::ALL.iter().map(DataType::canonical_name)
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &'static [&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

fn uuid_v4<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string()
}

fn mongo_object_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 12];
    rng.fill(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// UTC timestamp `now + offset`, offset drawn from `min_ms..=max_ms`
fn timestamp_offset_ms<R: Rng + ?Sized>(rng: &mut R, min_ms: i64, max_ms: i64) -> String {
    let offset = Duration::milliseconds(rng.gen_range(min_ms..=max_ms));
    (Utc::now() + offset).to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn lorem_word<R: Rng + ?Sized>(rng: &mut R) -> String {
    let word: String = Word().fake_with_rng(rng);
    // lorem data is lowercase ascii already; a stray entry still falls back to a noun
    if !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()) {
        word
    } else {
        pick(rng, NOUNS).to_string()
    }
}

fn title<R: Rng + ?Sized>(rng: &mut R) -> String {
    let words: Vec<String> = Words(3..9).fake_with_rng(rng);
    let mut title = words.join(" ");
    if let Some(first) = title.get(0..1) {
        let upper = first.to_uppercase();
        title.replace_range(0..1, &upper);
    }
    title
}

fn domain_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}.{}",
        lorem_word(rng),
        DomainSuffix().fake_with_rng::<String, _>(rng)
    )
}
