mod showcase;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use showcase::ShowcaseView;
pub use state::ViewError;
