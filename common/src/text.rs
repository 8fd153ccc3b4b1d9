//! Macros for defining textual values.

/// Macro for defining a validated textual value.
///
/// A valid value is trimmed, non-empty and doesn't exceed the `max` number of
/// characters.
///
/// # Example
///
/// ```ignore
/// # use common::define_text;
///
/// define_text! {
///     #[doc = "Title of a vacation."]
///     struct Title(max = 256);
/// }
/// ```
#[macro_export]
macro_rules! define_text {
    (
        #[doc = $doc:literal]
        struct $name:ident(max = $max:literal);
    ) => {
        #[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[doc = $doc]
        pub struct $name(::std::string::String);

        impl $name {
            #[doc = ::core::concat!(
                "Maximum number of characters in a [`",
                ::core::stringify!($name),
                "`].",
            )]
            pub const MAX_LEN: usize = $max;

            #[doc = ::core::concat!(
                "Creates a new [`",
                ::core::stringify!($name),
                "`] if the given `text` is valid.",
            )]
            #[must_use]
            pub fn new(
                text: impl ::core::convert::Into<::std::string::String>,
            ) -> ::core::option::Option<Self> {
                let text = text.into();
                Self::check(&text).then_some(Self(text))
            }

            fn check(text: &str) -> bool {
                text.trim() == text
                    && !text.is_empty()
                    && text.chars().count() <= Self::MAX_LEN
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(
                &self,
                f: &mut ::core::fmt::Formatter<'_>,
            ) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::new(s).ok_or(::core::concat!(
                    "invalid `",
                    ::core::stringify!($name),
                    "`",
                ))
            }
        }

        impl ::core::convert::From<$name> for ::std::string::String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        #[cfg(feature = "postgres")]
        impl<'a> $crate::private::postgres_types::FromSql<'a> for $name {
            fn from_sql(
                ty: &$crate::private::postgres_types::Type,
                raw: &'a [u8],
            ) -> ::core::result::Result<
                $name,
                ::std::boxed::Box<
                    dyn ::std::error::Error
                        + ::core::marker::Sync
                        + ::core::marker::Send
                >,
            > {
                <::std::string::String as
                    $crate::private::postgres_types::FromSql<'a>>::from_sql(
                    ty, raw,
                )
                .map(Self)
            }

            fn accepts(ty: &$crate::private::postgres_types::Type) -> bool {
                <::std::string::String as
                    $crate::private::postgres_types::FromSql<'_>>::accepts(ty)
            }
        }

        #[cfg(feature = "postgres")]
        impl $crate::private::postgres_types::ToSql for $name {
            $crate::private::postgres_types::to_sql_checked!();

            fn to_sql(
                &self,
                ty: &$crate::private::postgres_types::Type,
                w: &mut $crate::private::postgres_types::private::BytesMut,
            ) -> ::core::result::Result<
                $crate::private::postgres_types::IsNull,
                ::std::boxed::Box<
                    dyn ::std::error::Error
                        + ::core::marker::Sync
                        + ::core::marker::Send
                >,
            > {
                <::std::string::String as
                    $crate::private::postgres_types::ToSql>::to_sql(
                    &self.0, ty, w,
                )
            }

            fn accepts(ty: &$crate::private::postgres_types::Type) -> bool {
                <::std::string::String as
                    $crate::private::postgres_types::ToSql>::accepts(ty)
            }
        }
    };
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    define_text! {
        #[doc = "Short test text."]
        struct Short(max = 5);
    }

    #[test]
    fn validates_text() {
        assert!(Short::new("hello").is_some());
        assert!(Short::new("héllo").is_some());
        assert!(Short::new("hello!").is_none());
        assert!(Short::new("").is_none());
        assert!(Short::new(" hi").is_none());
        assert!(Short::new("hi\n").is_none());
    }

    #[test]
    fn parses_and_displays() {
        let text = Short::from_str("abc").unwrap();
        assert_eq!(text.to_string(), "abc");
        assert_eq!(text.as_ref(), "abc");
        assert_eq!(
            Short::from_str("  ").unwrap_err(),
            "invalid `Short`",
        );
    }
}
