//! Wrapper crate for the [Pexels](https://www.pexels.com) API.
//!
//! ## Usage
//!
//! First, create a [`Client`] with your API key. The crate never looks for a key on its own: get
//! it from your configuration, environment or secret store and hand it over.
//!
//! ```no_run
//! # use pexels::client::Client;
//! # fn main() -> Result<(), pexels::error::Error> {
//! let client = Client::new("my-api-key")?;
//! # Ok(()) }
//! ```
//!
//! Now it's ready to go! For example you can get photo #2014422 like this:
//!
//! ```no_run
//! # use pexels::client::Client;
//! # fn main() -> Result<(), pexels::error::Error> {
//! # let client = Client::new("my-api-key")?;
//! let photo = client.get_photo(2014422)?;
//!
//! println!("{}", photo.sources.original);
//! # Ok(()) }
//! ```
//!
//! Or you can make a search like on the website:
//!
//! ```no_run
//! # use pexels::client::Client;
//! # fn main() -> Result<(), pexels::error::Error> {
//! # let client = Client::new("my-api-key")?;
//! for video in client.search_videos("nature", 15, 1)?.items {
//!     println!("#{}", video.id);
//! }
//! # Ok(()) }
//! ```
//!
//! Every request blocks the calling thread until the response has been decoded. Nothing is
//! retried: failures come back as an [`Error`] right away.
//!
//! ## Notes from the official API:
//!
//! ### Request limits
//!
//! > Do not abuse the API. By default, the API is rate-limited to 200 requests per hour and
//! > 20,000 requests per month.
//! >
//! > [[...]](https://www.pexels.com/api/documentation/#guidelines)
//!
//! Each response tells how many requests are left for the month in its `X-Ratelimit-Remaining`
//! header. `pexels` records it after every request; read it with
//! [`Client::remaining_quota`]. A response without a readable value for that header is treated
//! as an error.
//!
//! ### Queries
//!
//! Search terms are put in the URL exactly as given. Use [`encode_query`] first if they contain
//! characters such as `&`, `=` or `#`.
//!
//! [`Client`]: client/struct.Client.html
//! [`Client::remaining_quota`]: client/struct.Client.html#method.remaining_quota
//! [`Error`]: error/enum.Error.html

mod utils;

/// Client related structures.
pub mod client;

/// Error management.
pub mod error;

/// Paged results.
pub mod page;

/// Photo management.
pub mod photo;

/// Page selection for the random helpers.
pub mod random;

/// Video management.
pub mod video;

pub use utils::encode_query;
