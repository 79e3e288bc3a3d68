use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Defines a string-backed identifier newtype with the usual conversions.
macro_rules! define_ids {
    ( $( $(#[$meta:meta])* $name:ident ),* $(,)? ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(String);

            impl $name {
                pub fn new(raw: impl Into<String>) -> Self {
                    Self(raw.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl Borrow<str> for $name {
                fn borrow(&self) -> &str {
                    &self.0
                }
            }

            impl From<&str> for $name {
                fn from(raw: &str) -> Self {
                    Self(raw.to_string())
                }
            }

            impl From<String> for $name {
                fn from(raw: String) -> Self {
                    Self(raw)
                }
            }

            impl PartialEq<str> for $name {
                fn eq(&self, other: &str) -> bool {
                    self.0 == other
                }
            }

            impl PartialEq<&str> for $name {
                fn eq(&self, other: &&str) -> bool {
                    self.0 == *other
                }
            }
        )*
    };
}

define_ids! {
    /// Identifier of a node, unique within its graph.
    NodeId,
    /// Identifier of a pin, unique across every node of its graph.
    PinId,
}

/// Produces identifiers that do not collide within a graph or across sessions.
///
/// Each id combines a per-generator random salt with a monotonic counter:
/// `"{prefix}_{salt}_{counter}"`. The counter rules out collisions between ids
/// of the same generator, the salt makes ids of two generators (for example a
/// template and a later editing session) practically disjoint.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    salt: u32,
    counter: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_salt(rand::random::<u32>())
    }

    /// A generator with a fixed salt, producing a reproducible id sequence.
    pub fn with_salt(salt: u32) -> Self {
        Self { salt, counter: 0 }
    }

    pub fn next_raw(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{}_{:08x}_{}", prefix, self.salt, self.counter)
    }

    pub fn node_id(&mut self) -> NodeId {
        NodeId(self.next_raw("node"))
    }

    pub fn pin_id(&mut self) -> PinId {
        PinId(self.next_raw("pin"))
    }
}
