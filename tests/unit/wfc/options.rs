//! Tests for `OptionSet` membership, set operations, and conversions

#[cfg(test)]
mod tests {
    use sketchkit::wfc::OptionSet;

    // Verifies a new OptionSet is empty with count 0
    // Verified by initializing the set with all bits present
    #[test]
    fn test_new_set_is_empty() {
        let set = OptionSet::new(10);
        assert_eq!(set.count(), 0);
        assert!(set.is_empty());
    }

    // Verifies a full OptionSet contains every index below capacity
    // Verified by initializing all bits to 0 instead of 1
    #[test]
    fn test_full_set_contains_all() {
        let set = OptionSet::full(5);
        for tile in 0..5 {
            assert!(set.contains(tile));
        }
        assert_eq!(set.count(), 5);
        assert!(!set.is_empty());
    }

    // Tests insertion and containment checking
    // Verified by removing the bit-setting logic from insert
    #[test]
    fn test_insert_and_contains() {
        let mut set = OptionSet::new(10);
        set.insert(5);
        assert!(set.contains(5));
        assert!(!set.contains(3));
        assert_eq!(set.count(), 1);
    }

    // Tests that out-of-capacity insertions are ignored
    // Verified by growing the set on out-of-range insert
    #[test]
    fn test_insert_beyond_capacity_ignored() {
        let mut set = OptionSet::new(4);
        set.insert(4);
        set.insert(100);
        assert_eq!(set.count(), 0);
        assert!(!set.contains(4));
    }

    // Tests clearing removes every tile
    // Verified by clearing only the first word
    #[test]
    fn test_clear() {
        let mut set = OptionSet::full(8);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.to_vec(), Vec::<usize>::new());
    }

    // Tests intersection of two sets keeps only shared tiles
    // Verified by changing the intersection operation to a union
    #[test]
    fn test_intersection() {
        let mut first = OptionSet::new(10);
        first.insert(1);
        first.insert(3);
        first.insert(5);

        let mut second = OptionSet::new(10);
        second.insert(3);
        second.insert(5);
        second.insert(7);

        let shared = first.intersection(&second);
        assert_eq!(shared.to_vec(), vec![3, 5]);

        first.intersect_with(&second);
        assert_eq!(first, shared);
    }

    // Tests union merges tiles from both sets
    // Verified by replacing the or-assign with an and-assign
    #[test]
    fn test_union_with() {
        let mut first = OptionSet::new(10);
        first.insert(1);

        let mut second = OptionSet::new(10);
        second.insert(8);

        first.union_with(&second);
        assert_eq!(first.to_vec(), vec![1, 8]);
    }

    // Tests sole returns the only remaining tile, and nothing otherwise
    // Verified by returning the first tile regardless of count
    #[test]
    fn test_sole() {
        let mut set = OptionSet::new(10);
        assert_eq!(set.sole(), None);

        set.insert(7);
        assert_eq!(set.sole(), Some(7));

        set.insert(2);
        assert_eq!(set.sole(), None);
    }

    // Tests to_vec lists tiles in ascending index order
    // Verified by iterating bits from the high end
    #[test]
    fn test_to_vec_ascending() {
        let mut set = OptionSet::new(16);
        set.insert(9);
        set.insert(0);
        set.insert(4);
        assert_eq!(set.to_vec(), vec![0, 4, 9]);
    }

    // Tests the display form names the count and members
    // Verified by formatting the capacity instead of the count
    #[test]
    fn test_display() {
        let mut set = OptionSet::new(10);
        set.insert(1);
        set.insert(3);
        assert_eq!(set.to_string(), "OptionSet(2 tiles: [1, 3])");
    }
}
