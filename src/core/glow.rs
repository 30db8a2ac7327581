use super::constants::{BOND_RANGE, BOND_SATURATION, GLOW_SMOOTHING};
use super::field::StarField;

impl StarField {
    /// Recount neighbors for every star and ease its glow toward the density
    /// target.
    ///
    /// All pairs are compared directly. The field is small and fixed, and the
    /// glow response timing is tuned against this pass, so keep it O(n²)
    /// unless the star count grows well past the low hundreds.
    pub fn update_glow(&mut self) {
        let effective = &mut self.effective;
        effective.clear();
        effective.extend(self.stars.iter().map(|s| s.effective_pos()));
        let counts = &mut self.counts;
        counts.clear();
        counts.resize(effective.len(), 0);

        for i in 0..effective.len() {
            for j in (i + 1)..effective.len() {
                if effective[i].distance(effective[j]) < BOND_RANGE {
                    counts[i] += 1;
                    counts[j] += 1;
                }
            }
        }

        for (s, &count) in self.stars.iter_mut().zip(self.counts.iter()) {
            s.neighbors = count;
            let target = glow_target(count);
            s.glow += (target - s.glow) * GLOW_SMOOTHING;
        }
    }
}

#[inline]
pub fn glow_target(neighbors: u32) -> f32 {
    (neighbors as f32 / BOND_SATURATION).clamp(0.0, 1.0)
}
