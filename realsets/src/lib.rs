#[cfg(feature = "core")]
#[doc(inline)]
pub use realsets_core as core;

#[cfg(feature = "algebra")]
#[doc(inline)]
pub use realsets_algebra as algebra;
