
use crate::MorseTable;

pub(super) fn table() -> &'static MorseTable {
    MorseTable::global()
}
