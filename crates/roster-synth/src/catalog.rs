//! Word lists the synthesizer draws from

/// Business type suffixes
pub const PHARMACY_TYPES: &[&str] = &[
    "Pharmacy",
    "Drug Store",
    "Apothecary",
    "Medicines",
    "Rx",
    "Health Center",
    "Community Pharmacy",
    "Family Pharmacy",
    "Care Pharmacy",
    "Wellness Pharmacy",
];

/// Descriptive business name prefixes
pub const PHARMACY_PREFIXES: &[&str] = &[
    "Main Street",
    "Downtown",
    "Village",
    "Corner",
    "Family",
    "Community",
    "Neighborhood",
    "Central",
    "Park Avenue",
    "Highland",
    "Riverside",
    "Sunset",
    "Maple",
    "Oak",
    "Pine",
    "First Choice",
    "Professional",
    "Premier",
    "Advanced",
    "Modern",
    "Classic",
    "Heritage",
];

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Lisa", "Matthew", "Nancy", "Anthony", "Sandra", "Mark",
    "Ashley", "Steven", "Kimberly", "Andrew", "Emily", "Kevin", "Donna", "Brian", "Michelle",
    "Priya", "Wei", "Carlos", "Aisha", "Nguyen", "Fatima", "Omar", "Rosa",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Patel", "Shah", "Kim",
];

pub const CITIES: &[&str] = &[
    "Springfield", "Franklin", "Greenville", "Bristol", "Clinton", "Fairview", "Salem",
    "Madison", "Georgetown", "Arlington", "Ashland", "Burlington", "Manchester", "Milton",
    "Newport", "Oxford", "Jackson", "Dover", "Hudson", "Kingston", "Lexington", "Marion",
    "Riverside", "Auburn", "Dayton", "Lebanon", "Centerville", "Mount Vernon", "Oakland",
    "Winchester", "Columbia", "Florence", "Chester", "Lancaster", "Troy", "Hamilton",
];

pub const STREET_NAMES: &[&str] = &[
    "Main", "Oak", "Pine", "Maple", "Cedar", "Elm", "Washington", "Lake", "Hill", "Park",
    "Walnut", "Spring", "North", "Ridge", "Church", "Willow", "Mill", "Sunset", "Jefferson",
    "Lincoln", "Highland", "Chestnut", "Meadow", "River", "Forest", "Jackson", "Franklin",
];

pub const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Boulevard", "Lane", "Drive", "Court", "Way", "Place", "Parkway",
];

/// US state and DC postal abbreviations
pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Appended directly to the sanitized business name
pub const EMAIL_DOMAIN_SUFFIXES: &[&str] =
    &["pharmacy.com", "rx.com", "care.com", "health.net", "meds.com"];

/// Staff who review membership applications
pub const REVIEWERS: &[&str] = &[
    "Sarah Mitchell",
    "David Chen",
    "Maria Lopez",
    "James Patterson",
    "Angela Brooks",
];

pub const APPLICATION_NOTES: &[&str] = &[
    "Awaiting copy of state pharmacy license.",
    "Requested multi-location pricing details.",
    "Referred by an existing member.",
    "Follow up on ownership documentation.",
    "Interested in the LTC division.",
    "Needs proof of enrollment for student rate.",
];

/// `#` is replaced by a random digit
pub const PHONE_MASK: &str = "(###) ###-####";
pub const ZIP_MASK: &str = "#####";
