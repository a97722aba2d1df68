use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

/// Upper bound (exclusive) of the page index picked by [`Client::random_photo`] and
/// [`Client::random_video`].
///
/// [`Client::random_photo`]: crate::client::Client::random_photo
/// [`Client::random_video`]: crate::client::Client::random_video
pub const RANDOM_PAGE_BOUND: u32 = 1000;

/// Source of page indices for the random helpers.
///
/// Any [`RngCore`] implementation is a `PageSelector`, drawing indices uniformly. Give the
/// client a seeded generator to make the random helpers reproducible:
///
/// ```no_run
/// # use pexels::client::Client;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// # fn main() -> pexels::error::Result<()> {
/// let client = Client::builder("my-api-key")
///     .page_selector(StdRng::seed_from_u64(42))
///     .build()?;
/// # Ok(()) }
/// ```
pub trait PageSelector: Send {
    /// Returns a page index in `[0, bound)`. `bound` is never zero.
    fn select_page(&mut self, bound: u32) -> u32;
}

impl<R: RngCore + Send> PageSelector for R {
    fn select_page(&mut self, bound: u32) -> u32 {
        self.gen_range(0..bound)
    }
}

/// The selector a client gets when none is configured: a generator seeded once from the OS.
pub fn default_selector() -> Box<dyn PageSelector> {
    Box::new(StdRng::from_entropy())
}
