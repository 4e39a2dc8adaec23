pub mod bar_view;
pub mod entry_view;

pub use bar_view::BarView;
pub use entry_view::EntryView;
