//! Bundled English catalog.

/// Key of the bundled default locale.
pub const DEFAULT_LOCALE: &str = "en";

/// Templates for every built-in rule plus the generic `custom` entry.
pub const CATALOG_EN: &[(&str, &str)] = &[
    ("required", "This field is required."),
    ("minLength", "Please enter at least {min} characters."),
    ("maxLength", "Please enter no more than {max} characters."),
    ("min", "Please enter a value greater than or equal to {min}."),
    ("max", "Please enter a value less than or equal to {max}."),
    ("email", "Please enter a valid email address."),
    ("url", "Please enter a valid URL."),
    ("pattern", "Please match the requested format."),
    ("numeric", "Please enter a valid number."),
    ("integer", "Please enter a whole number."),
    ("alpha", "Please use letters only."),
    ("alphanumeric", "Please use letters and numbers only."),
    ("phone", "Please enter a valid phone number."),
    ("date", "Please enter a valid date."),
    ("dateMin", "Please enter a date on or after {min}."),
    ("dateMax", "Please enter a date on or before {max}."),
    ("equalTo", "This field must match {target}."),
    ("notEqualTo", "This field must be different from {target}."),
    ("in", "Please select one of: {values}."),
    ("notIn", "This value is not allowed: {values}."),
    ("fileSize", "File size must not exceed {max}."),
    ("fileType", "Allowed file types: {types}."),
    ("creditCard", "Please enter a valid credit card number."),
    (
        "strongPassword",
        "Password must be at least 8 characters and include uppercase, lowercase, number and special character.",
    ),
    ("hexColor", "Please enter a valid hex color."),
    ("ipv4", "Please enter a valid IPv4 address."),
    ("ipv6", "Please enter a valid IPv6 address."),
    ("json", "Please enter valid JSON."),
    ("custom", "Please correct this field."),
];
