//! This is the namespace for all parts dealing with data in sampled waves.

use log::debug;

/// A buffer holding floating point audio data of a single channel.
pub struct AudioBuffer {
    samples: Vec<f64>,
}

#[allow(clippy::len_without_is_empty)]
impl AudioBuffer {
    pub fn new(sample_count: usize) -> Self {
        Self {
            samples: vec![0.0; sample_count],
        }
    }

    /// Set all samples to zero.
    pub fn fill_zero(&mut self) {
        self.samples.iter_mut().for_each(|s| *s = 0.0);
    }

    /// Size of the buffer in samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [f64] {
        &mut self.samples
    }

    /// Quantize the samples to signed 16-bit integers, scaling each sample by
    /// `scale` and rounding half away from zero.
    ///
    /// Values outside the representable range saturate at the nearest bound
    /// instead of wrapping around.
    ///
    /// # Examples
    ///
    /// ```
    /// use chordgen::wave::AudioBuffer;
    ///
    /// let mut buffer = AudioBuffer::new(3);
    /// buffer.samples_mut().copy_from_slice(&[0.5, -0.25, 64.0]);
    /// assert_eq!(buffer.quantize(4000.0), vec![2000, -1000, 32767]);
    /// ```
    pub fn quantize(&self, scale: f64) -> Vec<i16> {
        let total = self.samples.len();
        let step = (total / 10).max(1);
        let mut frames = Vec::with_capacity(total);
        for (i, &sample) in self.samples.iter().enumerate() {
            if i % step == 0 {
                debug!(
                    "progress: {:.2}% ({}/{})",
                    i as f64 * 100.0 / total as f64,
                    i,
                    total
                );
            }
            let value = (sample * scale).round();
            frames.push(value.max(f64::from(i16::MIN)).min(f64::from(i16::MAX)) as i16);
        }
        frames
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quantize_rounds_half_away_from_zero() {
        let mut buffer = AudioBuffer::new(4);
        buffer
            .samples_mut()
            .copy_from_slice(&[0.5, -0.5, 0.4, -0.4]);
        assert_eq!(buffer.quantize(1.0), vec![1, -1, 0, 0]);
    }

    #[test]
    fn quantize_saturates() {
        let mut buffer = AudioBuffer::new(2);
        buffer.samples_mut().copy_from_slice(&[100.0, -100.0]);
        assert_eq!(buffer.quantize(4000.0), vec![i16::MAX, i16::MIN]);
    }

    #[test]
    fn quantize_empty() {
        assert_eq!(AudioBuffer::new(0).quantize(4000.0), Vec::<i16>::new());
    }

    #[test]
    fn fill_zero_resets() {
        let mut buffer = AudioBuffer::new(2);
        buffer.samples_mut().copy_from_slice(&[1.0, -1.0]);
        buffer.fill_zero();
        assert_eq!(buffer.samples(), &[0.0, 0.0]);
    }
}
