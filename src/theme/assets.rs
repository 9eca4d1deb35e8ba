//! Remote images shown on the page.
//!
//! Loaded straight from their hosts; if one is unreachable the webview shows
//! its usual broken image.

pub const PROPOSAL_BACKGROUND: &str = "https://img.freepik.com/free-photo/textile-valentines-day-hearts-pink_1220-3829.jpg?t=st=1739526233~exp=1739529833~hmac=afbff84ea911ad5db98390cd739e7c8721b0af447947fda6d594860949f95922&w=996";

pub const ASKING_GIF: &str = "https://sumitjha.sirv.com/image2.gif";

pub const ACCEPTED_GIF: &str =
    "https://gifdb.com/images/thumbnail/cute-cat-kiss-animated-hug-j3uoo2pgfxti6d2y.gif";

pub const LETTER_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1518621736915-f3b1c41bfd00?q=80&w=3786&auto=format&fit=crop";
