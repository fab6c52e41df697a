use tracing::warn;

use crate::error::ContractError;

use super::oracle::HullSelection;

/// Checks a hull selection against the residual it was computed for and
/// returns the consumed mask, one entry per residual position.
///
/// The selection must be non-empty and its positions unique and within
/// `[0, residual)`.
pub(crate) fn consumed_mask(
    selection: &HullSelection,
    residual: usize,
    layer: usize,
) -> Result<Vec<bool>, ContractError> {
    check(selection, residual, layer).inspect_err(|err| {
        warn!(layer, residual, error = %err, "outer hull oracle broke its contract");
    })
}

fn check(
    selection: &HullSelection,
    residual: usize,
    layer: usize,
) -> Result<Vec<bool>, ContractError> {
    if selection.is_empty() {
        return Err(ContractError::EmptyHull { layer, residual });
    }

    let mut consumed = vec![false; residual];
    for face in selection {
        let Some(slot) = consumed.get_mut(face.local) else {
            return Err(ContractError::IndexOutOfRange {
                layer,
                index: face.local,
                residual,
            });
        };
        if *slot {
            return Err(ContractError::DuplicateIndex {
                layer,
                index: face.local,
            });
        }
        *slot = true;
    }
    Ok(consumed)
}
