//! Word lists for the value families `fake` has no locale data for.

pub const NOUNS: &[&str] = &[
    "account", "airport", "apple", "archive", "badge", "basket", "battery", "bicycle", "blanket",
    "bottle", "bridge", "bucket", "cable", "camera", "candle", "canvas", "castle", "ceiling",
    "channel", "cheese", "circle", "climate", "cloud", "coffee", "compass", "cookie", "cottage",
    "country", "courage", "crystal", "culture", "desert", "device", "diamond", "dinner", "doctor",
    "dragon", "engine", "evening", "fabric", "feather", "festival", "forest", "fountain", "galaxy",
    "garden", "glacier", "guitar", "hammer", "harbor", "helmet", "island", "jacket", "journal",
    "kettle", "kitchen", "ladder", "lantern", "library", "meadow", "melody", "mirror", "monitor",
    "mountain", "museum", "network", "notebook", "ocean", "orchard", "palace", "pencil", "planet",
    "pocket", "puzzle", "rabbit", "record", "river", "rocket", "saddle", "science", "shadow",
    "signal", "silver", "sketch", "socket", "spring", "station", "summit", "sunset", "thunder",
    "theory", "ticket", "timber", "tunnel", "valley", "village", "voyage", "wallet", "window",
    "winter", "wizard",
];

pub const COLORS: &[&str] = &[
    "azure", "black", "blue", "cyan", "fuchsia", "gold", "green", "grey", "indigo", "ivory",
    "lavender", "lime", "magenta", "maroon", "mint green", "navy blue", "olive", "orange",
    "orchid", "pink", "plum", "purple", "red", "salmon", "silver", "sky blue", "tan", "teal",
    "turquoise", "violet", "white", "yellow",
];

pub const DEPARTMENTS: &[&str] = &[
    "Automotive", "Baby", "Beauty", "Books", "Clothing", "Computers", "Electronics", "Games",
    "Garden", "Grocery", "Health", "Home", "Industrial", "Jewelery", "Kids", "Movies", "Music",
    "Outdoors", "Shoes", "Sports", "Tools", "Toys",
];

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Awesome", "Bespoke", "Compact", "Elegant", "Ergonomic", "Fantastic", "Generic", "Gorgeous",
    "Handcrafted", "Handmade", "Incredible", "Intelligent", "Licensed", "Luxurious", "Modern",
    "Oriented", "Practical", "Recycled", "Refined", "Rustic", "Sleek", "Small", "Tasty",
    "Unbranded", "Wireless",
];

pub const PRODUCT_MATERIALS: &[&str] = &[
    "Bamboo", "Bronze", "Ceramic", "Concrete", "Cotton", "Fresh", "Frozen", "Granite", "Leather",
    "Metal", "Plastic", "Rubber", "Silk", "Soft", "Steel", "Wooden",
];

pub const PRODUCTS: &[&str] = &[
    "Bacon", "Ball", "Bike", "Car", "Chair", "Cheese", "Chicken", "Chips", "Computer", "Fish",
    "Gloves", "Hat", "Headphones", "Keyboard", "Lamp", "Mouse", "Pants", "Pizza", "Salad",
    "Sausages", "Shirt", "Shoes", "Soap", "Table", "Towels", "Tuna", "Watch",
];

pub const PRODUCT_FEATURES: &[&str] = &[
    "all-day comfort",
    "a long-lasting battery",
    "a minimalist profile",
    "noise cancellation",
    "quick-dry fabric",
    "reinforced stitching",
    "smart temperature control",
    "tool-free assembly",
    "water-resistant coating",
];

pub const PRODUCT_AUDIENCES: &[&str] = &[
    "busy professionals",
    "everyday use",
    "families on the go",
    "home offices",
    "outdoor enthusiasts",
    "small spaces",
    "travellers",
];
