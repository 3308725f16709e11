pub mod channels;
pub mod district;
pub mod etag;
pub mod icons;
pub mod map_view;
pub mod news;
pub mod popup;

pub use channels::LiveChannel;
pub use district::*;
pub use icons::{StatusIcon, status_icon};
pub use news::{NewsEntry, NewsItem, news_items};
pub use popup::popup_html;
