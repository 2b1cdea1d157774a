/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err($crate::models::ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

pub(crate) use str_enum;

str_enum!(Classification {
    Normal => "normal",
    High => "high",
    Low => "low",
});

str_enum!(AbnormalStatus {
    High => "high",
    Low => "low",
});

impl Classification {
    /// The abnormal direction, or `None` for a value inside its range.
    pub fn abnormal(self) -> Option<AbnormalStatus> {
        match self {
            Self::Normal => None,
            Self::High => Some(AbnormalStatus::High),
            Self::Low => Some(AbnormalStatus::Low),
        }
    }

    pub fn is_normal(self) -> bool {
        self == Self::Normal
    }
}

impl From<AbnormalStatus> for Classification {
    fn from(status: AbnormalStatus) -> Self {
        match status {
            AbnormalStatus::High => Self::High,
            AbnormalStatus::Low => Self::Low,
        }
    }
}
