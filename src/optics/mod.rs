//! Optics for immutable data manipulation.
//!
//! Optics are composable accessors: each one names a part of a larger
//! structure and knows how to read it and how to produce an updated copy
//! of the whole. Nothing is mutated in place.
//!
//! All optics in this crate hand back owned values (`get` clones the
//! focus out of the source). This keeps composition uniform, including
//! through iso- and prism-derived optics whose foci are computed rather
//! than stored in the source.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Iso <: Lens
//! Iso <: Prism
//! Lens <: Traversal
//! Prism <: Traversal
//! Lens + Prism = Optional
//! ```
//!
//! # Available Optics
//!
//! - [`Iso`]: Lossless bidirectional conversion between two types
//! - [`Lens`]: Focus on a single field (get/set access)
//! - [`Prism`]: Focus on a variant of a sum type (preview/review access)
//! - [`Optional`]: Focus on a value that may be absent
//! - [`Traversal`]: Focus on zero or more elements (batch access)
//!
//! # Example with Lens
//!
//! ```
//! use kleisli::lens;
//! use kleisli::optics::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.get(&person), "Main St");
//!
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo"); // other fields unchanged
//! ```
//!
//! # Example with Prism and Iso
//!
//! ```
//! use kleisli::prism;
//! use kleisli::optics::{Iso, Prism, iso_swap};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Message {
//!     Pair((i32, String)),
//!     Empty,
//! }
//!
//! // Prism into the variant, iso to swap the pair inside it.
//! let swapped_pair = prism!(Message, Pair).compose_iso(iso_swap());
//!
//! let message = Message::Pair((1, "x".to_string()));
//! assert_eq!(swapped_pair.preview(&message), Some(("x".to_string(), 1)));
//! ```
//!
//! # Laws
//!
//! Each optic carries laws (stated on its trait) that constructors are
//! trusted, not forced, to uphold: Iso round-trips, Lens GetPut/PutGet/
//! PutPut, Prism PreviewReview/ReviewPreview, Optional GetOptionSet/
//! SetGetOption, Traversal identity/composition. The crate checks them in
//! its property-based test suites rather than at runtime.

mod iso;
mod lens;
mod optional;
mod prism;
mod standard_optics;
mod traversal;

// Re-export all iso-related types and traits
pub use iso::ComposedIso;
pub use iso::FunctionIso;
pub use iso::Iso;
pub use iso::IsoAsLens;
pub use iso::IsoAsPrism;
pub use iso::IsoPrism;
pub use iso::MappedIso;
pub use iso::ReversedIso;

// Re-export all lens-related types and traits
pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;

// Re-export all prism-related types and traits
pub use prism::ComposedPrism;
pub use prism::FunctionPrism;
pub use prism::Prism;
pub use prism::PrismIso;

// Re-export all optional-related types and traits
pub use optional::ComposedOptional;
pub use optional::FunctionOptional;
pub use optional::LensPrismOptional;
pub use optional::Optional;

// Re-export all traversal-related types and traits
pub use traversal::ComposedTraversal;
pub use traversal::LensAsTraversal;
pub use traversal::OptionTraversal;
pub use traversal::PrismAsTraversal;
pub use traversal::ResultTraversal;
pub use traversal::Traversal;
pub use traversal::VecTraversal;

// Re-export standard optics
pub use standard_optics::iso_add;
pub use standard_optics::iso_identity;
pub use standard_optics::iso_millis;
pub use standard_optics::iso_reverse_vec;
pub use standard_optics::iso_sub;
pub use standard_optics::iso_swap;
pub use standard_optics::iso_swap_either;
pub use standard_optics::iso_utf8;
pub use standard_optics::prism_single;
