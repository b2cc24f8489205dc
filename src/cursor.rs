use crate::defaults::SLOT_BAND;
use crate::SegmentSpec;

/// Map the number of digits typed into a segment to a global cursor slot.
///
/// Every segment owns the band `segment_index * SLOT_BAND ..`; within a
/// segment the slot counts display characters, so once the typed digits pass
/// the integer part the decimal point's own slot is skipped.
pub fn cursor_slot(segment_index: usize, digits_typed: usize, spec: &SegmentSpec) -> usize {
    let base = segment_index * SLOT_BAND;

    match spec.decimal_places {
        Some(_) => {
            let integer_digits = spec.integer_digits();
            if digits_typed <= integer_digits {
                base + digits_typed
            } else {
                base + integer_digits + 1 + (digits_typed - integer_digits)
            }
        }
        None => base + digits_typed,
    }
}

/// Split a global slot back into `(segment_index, char_index)`.
pub fn locate_slot(slot: usize) -> (usize, usize) {
    (slot / SLOT_BAND, slot % SLOT_BAND)
}
