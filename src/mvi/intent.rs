/// Something that happened and should change a slice: a finished request,
/// a reaction click, a counter bump.
pub trait Intent: Send + 'static {}
