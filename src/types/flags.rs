//! Per-box bitset classifying what a box contains.

use bitflags::bitflags;

bitflags! {
    /// Flags describing the contents of a single box, set once during
    /// (out-of-scope) tree construction and read-only from here on.
    #[derive(Default)]
    pub struct BoxFlags: u8 {
        /// The box directly owns source particles.
        const HAS_OWN_SOURCES = 0b0000_0001;
        /// The box directly owns target particles.
        const HAS_OWN_TARGETS = 0b0000_0010;
        /// Some descendant of the box owns source particles.
        const HAS_CHILD_SOURCES = 0b0000_0100;
        /// Some descendant of the box owns target particles.
        const HAS_CHILD_TARGETS = 0b0000_1000;
        /// The box has at least one child (interior box).
        const HAS_CHILDREN = 0b0001_0000;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_compose() {
        let flags = BoxFlags::HAS_OWN_SOURCES | BoxFlags::HAS_CHILDREN;
        assert!(flags.contains(BoxFlags::HAS_OWN_SOURCES));
        assert!(flags.contains(BoxFlags::HAS_CHILDREN));
        assert!(!flags.contains(BoxFlags::HAS_OWN_TARGETS));
    }
}
