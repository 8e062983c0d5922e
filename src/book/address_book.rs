use crate::models::Record;
use indexmap::IndexMap;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Contacts keyed by name.
///
/// Holds at most one [`Record`] per name. Adding a record under a name that
/// is already present replaces the stored record. Lookups that miss return
/// `None` rather than an error.
///
/// Records are enumerated in the order their names were first added.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut alice = Record::new("Alice");
/// alice.add_phone("1111111111").unwrap();
/// book.add_record(alice);
///
/// assert!(book.find("Alice").is_some());
/// assert!(book.find("Bob").is_none());
///
/// book.delete("Alice");
/// assert!(book.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name, replacing any record already there.
    ///
    /// Returns the replaced record. Phone lists are not merged.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        self.records.insert(key, record)
    }

    /// The record stored under `name`.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable access to the record stored under `name`.
    ///
    /// A record's name cannot change, so edits through this reference keep
    /// the book keyed correctly.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`. Does nothing if it is absent.
    ///
    /// Remaining records keep their relative order.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.shift_remove(name)
    }

    /// Whether a record is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the stored names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Iterate over the stored records.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

// Serde support - serialize as a sequence of records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for record in self.records.values() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

// Serde support - rebuild through add_record so the name key always matches
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BookVisitor;

        impl<'de> Visitor<'de> for BookVisitor {
            type Value = AddressBook;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a sequence of contact records")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut book = AddressBook::new();
                while let Some(record) = seq.next_element::<Record>()? {
                    book.add_record(record);
                }
                Ok(book)
            }
        }

        deserializer.deserialize_seq(BookVisitor)
    }
}
