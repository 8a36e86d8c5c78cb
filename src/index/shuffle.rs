use rand::Rng;

/// Incremental shuffle: the k-th item (0-based) lands on a uniformly drawn
/// slot in `[0, k]`, and whatever sat there moves to the end.
///
/// With a uniform `rng` every permutation of the input is equally likely.
pub(super) fn shuffle_in<T, I, R>(items: I, rng: &mut R) -> Vec<T>
where
    I: ExactSizeIterator<Item = T>,
    R: Rng + ?Sized,
{
    let mut out = Vec::with_capacity(items.len());
    for (k, item) in items.enumerate() {
        let slot = rng.random_range(0..=k);
        out.push(item);
        out.swap(slot, k);
    }
    out
}
