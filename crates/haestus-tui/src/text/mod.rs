//! Text rendering utilities.
//!
//! - [`render_article`] - Markdown to styled, wrapped lines with heading anchors
//! - [`MarkdownStyles`] - Style configuration for markdown elements
//! - [`wrap_text`], [`wrap_lines`] - Text wrapping
//! - [`visual_width`], [`truncate_to_width`] - Cell-width aware measuring

mod markdown;
mod styles;
mod width;
mod wrap;

pub use markdown::{render_article, render_markdown, RenderedArticle};
pub use styles::MarkdownStyles;
pub use width::{truncate_to_width, visual_width};
pub use wrap::{wrap_lines, wrap_text};
