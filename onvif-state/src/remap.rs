//! Exhaustive wire <-> domain enumeration tables

/// Declare a domain enum and its one-to-one mapping to a wire enum
///
/// The wire type must be in scope under a plain identifier. Both `From`
/// directions are generated from the same table, so adding a
/// variant on either side without updating the table fails to compile.
macro_rules! remap_enum {
    (
        $(#[$meta:meta])*
        pub enum $domain:ident <=> $wire:ident {
            $($(#[$vmeta:meta])* $variant:ident <=> $wire_variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
        pub enum $domain {
            #[default]
            $($(#[$vmeta])* $variant),+
        }

        impl $domain {
            /// Every variant, in declaration order
            pub const ALL: &'static [$domain] = &[$($domain::$variant),+];
        }

        impl From<$wire> for $domain {
            fn from(value: $wire) -> Self {
                match value {
                    $($wire::$wire_variant => $domain::$variant),+
                }
            }
        }

        impl From<$domain> for $wire {
            fn from(value: $domain) -> Self {
                match value {
                    $($domain::$variant => $wire::$wire_variant),+
                }
            }
        }
    };
}
