mod countdown_view;

pub use countdown_view::CountdownView;
