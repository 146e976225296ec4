pub mod embed;
mod empty;
pub mod icons;
mod link;
pub mod thumbnail;

pub use embed::EmbedHost;
pub use empty::Empty;
pub use link::Link;
pub use thumbnail::Thumbnail;

use druid::{Data, Widget};

pub trait MyWidgetExt<T: Data>: Widget<T> + Sized + 'static {
    fn link(self) -> Link<T> {
        Link::new(self)
    }
}

impl<T: Data, W: Widget<T> + 'static> MyWidgetExt<T> for W {}
