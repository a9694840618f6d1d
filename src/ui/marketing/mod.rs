//! Public marketing section: shared layout and its pages.

mod landing;
mod layout;
mod not_found;

pub use landing::{FEATURES, Feature, FeatureIcon, LANDING_METADATA, LandingPage};
pub use layout::{
    COPYRIGHT, FOOTER_COLUMNS, FooterColumn, HEADER_LINKS, LOGIN_LINK, MarketingLayout, NavLink,
    SIGNUP_LINK, TAGLINE,
};
pub use not_found::{NOT_FOUND_METADATA, NotFoundPage};
