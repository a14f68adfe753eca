//! Terminal User Interface (TUI) for viewing a game as a move tree

pub mod app;
pub mod theme;
pub mod tree_widget;

pub use app::TreeViewer;
pub use theme::Theme;
pub use tree_widget::TreeWidget;
