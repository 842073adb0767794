pub mod frame;
pub mod render;
pub mod span;
pub mod spinner;
pub mod style;
pub mod theme;

pub use frame::{CursorPos, RenderFrame};
pub use render::{FormRenderer, FormView};
pub use span::{Span, SpanLine};
pub use spinner::Spinner;
pub use style::{Color, Style};
pub use theme::Theme;
