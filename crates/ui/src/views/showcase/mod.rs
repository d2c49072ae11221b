mod actions;
mod components;
mod state;
mod view;

#[cfg(test)]
mod intent_smoke;

pub use actions::ShowcaseIntent;
pub use view::ShowcaseView;

#[cfg(test)]
pub(crate) use view::ShowcaseTestHandles;
