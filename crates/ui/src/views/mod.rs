mod filter;
mod state;
mod study;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use filter::FilterView;
pub use state::ViewError;
pub use study::StudyView;
