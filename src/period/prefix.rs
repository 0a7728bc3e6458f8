/// Prefix (failure) function: `pi[i]` is the length of the longest proper
/// prefix of `seq[..=i]` that is also a suffix of it. Runs in linear time.
pub fn prefix_function<T: PartialEq>(seq: &[T]) -> Vec<usize> {
    let mut pi = vec![0usize; seq.len()];
    for i in 1..seq.len() {
        let mut j = pi[i - 1];
        while j > 0 && seq[i] != seq[j] {
            j = pi[j - 1];
        }
        if seq[i] == seq[j] {
            j += 1;
        }
        pi[i] = j;
    }
    pi
}

/// Smallest `p` such that `seq` is an exact repetition of its first `p`
/// elements.
///
/// The candidate is `len - pi[len - 1]`. It is accepted only when it divides
/// the length: a sequence that ends in a partial copy of its block (e.g.
/// `[0, 1, 2, 0, 1]`) yields `None`. Without any self-overlap the candidate is
/// `len` itself. An empty sequence also yields `None`.
pub fn minimal_period<T: PartialEq>(seq: &[T]) -> Option<usize> {
    let n = seq.len();
    let last = *prefix_function(seq).last()?;
    let p = n - last;
    if n % p == 0 {
        Some(p)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_function_matches_classic_example() {
        let s: Vec<char> = "abcabcd".chars().collect();
        assert_eq!(prefix_function(&s), vec![0, 0, 0, 1, 2, 3, 0]);
        let t = [0, 0, 1, 0, 0, 1, 0, 0];
        assert_eq!(prefix_function(&t), vec![0, 1, 0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn repeated_blocks_recover_block_length() {
        let block = [2, 0, 1, 1];
        for reps in 1..5 {
            let seq: Vec<usize> = block.iter().copied().cycle().take(block.len() * reps).collect();
            assert_eq!(minimal_period(&seq), Some(4), "reps={reps}");
        }
    }

    #[test]
    fn constant_and_single_sequences_have_period_one() {
        assert_eq!(minimal_period(&[3]), Some(1));
        for n in 1..8 {
            assert_eq!(minimal_period(&vec![1usize; n]), Some(1));
        }
    }

    #[test]
    fn aperiodic_sequence_is_its_own_period() {
        assert_eq!(minimal_period(&[0, 1, 2, 3]), Some(4));
    }

    #[test]
    fn empty_sequence_has_no_period() {
        assert_eq!(minimal_period::<usize>(&[]), None);
    }

    #[test]
    fn partial_repeat_is_not_periodic() {
        // Border of length 2 gives candidate 3, which does not divide 5.
        assert_eq!(minimal_period(&[0, 1, 2, 0, 1]), None);
    }

    #[test]
    fn doubling_preserves_period() {
        let s = vec![1usize, 0, 1, 0, 2, 1, 0, 1, 0, 2];
        let doubled: Vec<usize> = s.iter().chain(s.iter()).copied().collect();
        assert_eq!(minimal_period(&s), Some(5));
        assert_eq!(minimal_period(&doubled), minimal_period(&s));
    }
}
