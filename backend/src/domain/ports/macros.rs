//! Defines helper macros for generating domain port error enums.
//!
//! Each variant gets a snake_case constructor accepting `impl Into<_>` for
//! its fields and an `is_<variant>` predicate, so callers can branch on the
//! failure category without string matching.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (@predicate $variant:ident $($fields:tt)?) => {
        ::paste::paste! {
            #[doc = concat!("Return `true` for [`Self::", stringify!($variant), "`].")]
            pub fn [<is_ $variant:snake>](&self) -> bool {
                matches!(self, Self::$variant { .. })
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( {
                    $(
                        #[doc = concat!("`", stringify!($field), "` context.")]
                        $field : $ty
                    ),*
                } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
                define_port_error!(@predicate $variant);
            )*
        }
    };
}

pub(crate) use define_port_error;
