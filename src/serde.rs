//! `serde` support for [`PositionalTree`]s
//!
//! A tree is represented as the plain sequence of its elements. Priorities aren't preserved:
//! deserializing builds a fresh tree with new ones.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};

use std::fmt;
use std::marker::PhantomData;

use crate::PositionalTree;

impl<T: Serialize> Serialize for PositionalTree<T> {
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PositionalTree<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(PositionalTreeVisitor {
            marker: PhantomData,
        })
    }
}

struct PositionalTreeVisitor<T> {
    marker: PhantomData<PositionalTree<T>>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for PositionalTreeVisitor<T> {
    type Value = PositionalTree<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        // The size hint comes from the input, so it isn't trusted for preallocation
        let mut values = Vec::new();
        while let Some(value) = seq.next_element()? {
            values.push(value);
        }

        Ok(PositionalTree::build(values))
    }
}

#[cfg(test)]
mod tests {
    use crate::PositionalTree;
    use serde::de::value::{Error, SeqDeserializer};
    use serde::Deserialize;

    #[test]
    fn json_round_trip() {
        let mut tree = PositionalTree::build([1, 2, 3, 4, 5]);
        tree.move_range_to_front(2, 4).unwrap();

        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, "[2,3,4,1,5]");

        let back: PositionalTree<i32> = serde_json::from_str(&json).unwrap();
        back.validate();
        assert_eq!(back, tree);
    }

    /// Yields nothing, while claiming to have `self.0` elements left
    struct Overclaiming(usize);

    impl Iterator for Overclaiming {
        type Item = u32;

        fn next(&mut self) -> Option<u32> {
            None
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.0, Some(self.0))
        }
    }

    #[test]
    fn huge_size_hint_is_ignored() {
        let deserializer = SeqDeserializer::<_, Error>::new(Overclaiming(usize::MAX / 2));
        let tree = PositionalTree::<u32>::deserialize(deserializer).unwrap();
        assert!(tree.is_empty());
    }
}
