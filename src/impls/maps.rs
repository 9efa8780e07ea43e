use alloc::boxed::Box;
use alloc::collections::BTreeMap;

use crate::Plain;
use crate::kind::PlainRef;
use crate::ops::{AsMapKey, Map, MapEntryIter};

impl<K: AsMapKey, V: Plain> Plain for BTreeMap<K, V> {
    #[inline]
    fn plain_ref(&self) -> PlainRef<'_> {
        PlainRef::Map(self)
    }
}

impl<K: AsMapKey, V: Plain> Map for BTreeMap<K, V> {
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter_entries(&self) -> MapEntryIter<'_> {
        Box::new(
            self.iter()
                .map(|(key, value)| (key.as_map_key(), value as &dyn Plain)),
        )
    }
}

#[cfg(feature = "std")]
mod hash {
    use alloc::boxed::Box;
    use std::collections::HashMap;

    use crate::Plain;
    use crate::kind::PlainRef;
    use crate::ops::{AsMapKey, Map, MapEntryIter};

    impl<K: AsMapKey, V: Plain, S> Plain for HashMap<K, V, S> {
        #[inline]
        fn plain_ref(&self) -> PlainRef<'_> {
            PlainRef::Map(self)
        }
    }

    impl<K: AsMapKey, V: Plain, S> Map for HashMap<K, V, S> {
        #[inline]
        fn len(&self) -> usize {
            HashMap::len(self)
        }

        fn iter_entries(&self) -> MapEntryIter<'_> {
            Box::new(
                self.iter()
                    .map(|(key, value)| (key.as_map_key(), value as &dyn Plain)),
            )
        }
    }
}
