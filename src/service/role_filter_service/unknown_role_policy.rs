use strum::{AsRefStr, EnumString};

///
/// What users whose role is neither admin nor employee get to see.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, AsRefStr)]
pub enum UnknownRolePolicy {
    #[default]
    #[strum(serialize = "show_all")]
    ShowAll,
    #[strum(serialize = "show_none")]
    ShowNone,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(
            "show_none".parse::<UnknownRolePolicy>().unwrap(),
            UnknownRolePolicy::ShowNone
        );
        assert!("hide".parse::<UnknownRolePolicy>().is_err());
    }
}
