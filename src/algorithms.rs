pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::monotone_chain::convex_hull;
