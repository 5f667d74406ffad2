/// A value a reducer owns. `Default` is the empty slice a controller starts
/// from, and `PartialEq` lets tests compare whole snapshots.
pub trait SliceState: Clone + PartialEq + Default + Send + 'static {}
