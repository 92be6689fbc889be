//! Step generators for the four array sorts
//!
//! Each generator copies the caller's input into a private working buffer,
//! sorts that buffer, and records one [`Step`] per observable operation. The
//! recursive sorts thread the buffer and the step log through explicit
//! `&mut` parameters; nothing else is shared between calls.
//!
//! Descriptions are formatted from the working buffer at the moment the step
//! is recorded, so they never depend on anything mutated afterwards.

use crate::errors::{Result, VisualizerError};
use crate::step::{Step, StepAction, Value};

fn working_copy(input: &[Value]) -> Result<Vec<Value>> {
    if input.is_empty() {
        return Err(VisualizerError::EmptyInput);
    }
    Ok(input.to_vec())
}

fn compare(a: usize, b: usize, description: String) -> Step {
    Step::new(StepAction::Compare { indices: [a, b] }, description)
}

fn swap(a: usize, b: usize, description: String) -> Step {
    Step::new(StepAction::Swap { indices: [a, b] }, description)
}

fn mark_sorted(index: usize, value: Value) -> Step {
    Step::new(
        StepAction::MarkSorted {
            indices: vec![index],
        },
        format!("Mark {} as sorted", value),
    )
}

// ========== Bubble sort ==========

/// Bubble sort: compare adjacent pairs, swap when out of order, fix one
/// position per pass.
pub fn bubble_sort(input: &[Value]) -> Result<Vec<Step>> {
    let mut arr = working_copy(input)?;
    let n = arr.len();
    let mut steps = Vec::new();

    for pass in 0..n - 1 {
        for j in 0..n - pass - 1 {
            steps.push(compare(
                j,
                j + 1,
                format!("Compare {} and {}", arr[j], arr[j + 1]),
            ));

            if arr[j] > arr[j + 1] {
                steps.push(swap(j, j + 1, format!("Swap {} and {}", arr[j], arr[j + 1])));
                arr.swap(j, j + 1);
            }
        }
        let fixed = n - 1 - pass;
        steps.push(mark_sorted(fixed, arr[fixed]));
    }
    steps.push(mark_sorted(0, arr[0]));

    Ok(steps)
}

// ========== Merge sort ==========

/// Top-down merge sort. Every merge emits its comparisons followed by a
/// `merge` step carrying the full post-merge array.
pub fn merge_sort(input: &[Value]) -> Result<Vec<Step>> {
    let mut arr = working_copy(input)?;
    let mut steps = Vec::new();
    let last = arr.len() - 1;

    merge_sort_range(&mut arr, 0, last, &mut steps);

    steps.push(Step::new(
        StepAction::MarkSorted {
            indices: (0..arr.len()).collect(),
        },
        "Array is fully sorted",
    ));

    Ok(steps)
}

fn merge_sort_range(arr: &mut [Value], left: usize, right: usize, steps: &mut Vec<Step>) {
    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;
    merge_sort_range(arr, left, mid, steps);
    merge_sort_range(arr, mid + 1, right, steps);
    merge_runs(arr, left, mid, right, steps);
}

/// Merge `[left, mid]` and `[mid + 1, right]`. Ties take from the left run.
fn merge_runs(arr: &mut [Value], left: usize, mid: usize, right: usize, steps: &mut Vec<Step>) {
    let mut merged = Vec::with_capacity(right - left + 1);
    let (mut i, mut j) = (left, mid + 1);

    while i <= mid && j <= right {
        steps.push(compare(i, j, format!("Compare {} and {}", arr[i], arr[j])));

        if arr[i] <= arr[j] {
            merged.push(arr[i]);
            i += 1;
        } else {
            merged.push(arr[j]);
            j += 1;
        }
    }

    merged.extend_from_slice(&arr[i..=mid]);
    merged.extend_from_slice(&arr[j..=right]);
    arr[left..=right].copy_from_slice(&merged);

    steps.push(Step::new(
        StepAction::Merge {
            indices: (left..=right).collect(),
            values: arr.to_vec(),
        },
        "Merge segments",
    ));
}

// ========== Quick sort ==========

/// Quick sort with Lomuto partitioning (pivot = last element of the range).
pub fn quick_sort(input: &[Value]) -> Result<Vec<Step>> {
    let mut arr = working_copy(input)?;
    let mut steps = Vec::new();
    let last = arr.len() - 1;

    quick_sort_range(&mut arr, 0, last, &mut steps);

    Ok(steps)
}

fn quick_sort_range(arr: &mut [Value], low: usize, high: usize, steps: &mut Vec<Step>) {
    if low < high {
        let placed = partition(arr, low, high, steps);
        steps.push(mark_sorted(placed, arr[placed]));

        if placed > low {
            quick_sort_range(arr, low, placed - 1, steps);
        }
        quick_sort_range(arr, placed + 1, high, steps);
    } else if low == high {
        // Single-element partition is already in its final slot
        steps.push(mark_sorted(low, arr[low]));
    }
}

/// Returns the final index of the pivot.
fn partition(arr: &mut [Value], low: usize, high: usize, steps: &mut Vec<Step>) -> usize {
    let pivot = arr[high];
    steps.push(Step::new(
        StepAction::Pivot { index: high },
        format!("Select {} as pivot", pivot),
    ));

    let mut store = low;
    for j in low..high {
        steps.push(compare(
            j,
            high,
            format!("Compare {} with pivot {}", arr[j], pivot),
        ));

        if arr[j] < pivot {
            if store != j {
                steps.push(swap(store, j, format!("Swap {} and {}", arr[store], arr[j])));
                arr.swap(store, j);
            }
            store += 1;
        }
    }

    // Emitted even when it is a self-swap: placing the pivot is always shown
    steps.push(swap(
        store,
        high,
        format!("Place pivot {} in correct position", pivot),
    ));
    arr.swap(store, high);

    store
}

// ========== Heap sort ==========

/// Heap sort: bottom-up max-heap construction, then repeated root extraction.
pub fn heap_sort(input: &[Value]) -> Result<Vec<Step>> {
    let mut arr = working_copy(input)?;
    let n = arr.len();
    let mut steps = Vec::new();

    for root in (0..n / 2).rev() {
        heapify(&mut arr, n, root, &mut steps);
    }

    for end in (1..n).rev() {
        steps.push(swap(0, end, format!("Move {} to sorted position", arr[0])));
        arr.swap(0, end);
        steps.push(mark_sorted(end, arr[end]));

        heapify(&mut arr, end, 0, &mut steps);
    }
    steps.push(mark_sorted(0, arr[0]));

    Ok(steps)
}

/// Sift `root` down within the first `heap_len` slots.
fn heapify(arr: &mut [Value], heap_len: usize, root: usize, steps: &mut Vec<Step>) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < heap_len {
        steps.push(compare(
            left,
            largest,
            format!("Compare {} and {}", arr[left], arr[largest]),
        ));
        if arr[left] > arr[largest] {
            largest = left;
        }
    }

    if right < heap_len {
        steps.push(compare(
            right,
            largest,
            format!("Compare {} and {}", arr[right], arr[largest]),
        ));
        if arr[right] > arr[largest] {
            largest = right;
        }
    }

    if largest != root {
        steps.push(swap(
            root,
            largest,
            format!("Swap {} and {}", arr[root], arr[largest]),
        ));
        arr.swap(root, largest);
        heapify(arr, heap_len, largest, steps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepKind;

    fn kinds(steps: &[Step]) -> Vec<StepKind> {
        steps.iter().map(Step::kind).collect()
    }

    #[test]
    fn test_bubble_two_elements_in_order() {
        let steps = bubble_sort(&[1, 2]).unwrap();
        assert_eq!(
            kinds(&steps),
            vec![StepKind::Compare, StepKind::MarkSorted, StepKind::MarkSorted]
        );
        assert_eq!(steps[1].indices(), &[1]);
        assert_eq!(steps[2].indices(), &[0]);
    }

    #[test]
    fn test_single_element_inputs() {
        for generate in [bubble_sort, heap_sort, quick_sort, merge_sort] {
            let steps = generate(&[7]).unwrap();
            assert_eq!(steps.len(), 1);
            assert_eq!(steps[0].kind(), StepKind::MarkSorted);
            assert_eq!(steps[0].indices(), &[0]);
        }
    }

    #[test]
    fn test_empty_input_rejected() {
        for generate in [bubble_sort, heap_sort, quick_sort, merge_sort] {
            assert_eq!(generate(&[]), Err(VisualizerError::EmptyInput));
        }
    }

    #[test]
    fn test_quick_sort_self_swap_is_kept_for_pivot_placement() {
        // Already sorted: every element is < pivot, so no scan swaps happen,
        // but the pivot placement is still recorded.
        let steps = quick_sort(&[1, 2, 3]).unwrap();
        assert_eq!(steps[0].kind(), StepKind::Pivot);
        assert_eq!(steps[1].kind(), StepKind::Compare);
        assert_eq!(steps[2].kind(), StepKind::Compare);
        assert_eq!(steps[3].action, StepAction::Swap { indices: [2, 2] });
        assert_eq!(steps[3].description, "Place pivot 3 in correct position");
    }

    #[test]
    fn test_merge_compares_before_merge_step() {
        let steps = merge_sort(&[2, 1]).unwrap();
        assert_eq!(
            kinds(&steps),
            vec![StepKind::Compare, StepKind::Merge, StepKind::MarkSorted]
        );
        assert_eq!(
            steps[1].action,
            StepAction::Merge {
                indices: vec![0, 1],
                values: vec![1, 2],
            }
        );
    }

    #[test]
    fn test_merge_ties_take_from_left_run() {
        let steps = merge_sort(&[1, 3, 1, 2]).unwrap();
        let compares: Vec<Vec<usize>> = steps
            .iter()
            .filter(|s| s.kind() == StepKind::Compare)
            .map(|s| s.indices().to_vec())
            .collect();
        // Runs [1, 3] and [1, 2] each compare once, then the final merge
        // starts on the tie at 0 and 2 and moves the left cursor
        assert_eq!(
            compares,
            vec![vec![0, 1], vec![2, 3], vec![0, 2], vec![1, 2], vec![1, 3]]
        );
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = vec![3, 1, 2];
        let _ = heap_sort(&input).unwrap();
        assert_eq!(input, vec![3, 1, 2]);
    }
}
