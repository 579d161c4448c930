/// Identity of a page section (and of a navigation link's target).
///
/// Typically `&'static str` or `String` ids such as `"s3"`.
#[cfg(not(feature = "tracing"))]
pub trait SectionKey: Clone + PartialEq {}
#[cfg(not(feature = "tracing"))]
impl<T: Clone + PartialEq> SectionKey for T {}

#[cfg(feature = "tracing")]
pub trait SectionKey: Clone + PartialEq + core::fmt::Debug {}
#[cfg(feature = "tracing")]
impl<T: Clone + PartialEq + core::fmt::Debug> SectionKey for T {}
