use strum::EnumString;

///
/// Role read from the logged in user object.
///
/// Matching is exact, any value other than `admin` and `employee`
/// ends up in [Role::Other] with the original text.
///
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
pub enum Role {
    #[strum(serialize = "admin")]
    Admin,
    #[strum(serialize = "employee")]
    Employee,
    #[strum(default)]
    Other(String),
}

impl Role {
    pub fn parse(value: &str) -> Self {
        // FromStr can't fail because of the default variant
        value
            .parse()
            .unwrap_or_else(|_| Self::Other(value.to_string()))
    }
}
