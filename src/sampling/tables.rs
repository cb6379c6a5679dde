//! Reference tables for single sampling plans, normal inspection.
//!
//! Code letters follow ISO 2859-1 / ANSI Z1.4 Table I. The accept/reject grid
//! is indexed `[letter][aql column]`; `NA` marks combinations without a plan.

use super::aql::CodeLetter::{self, *};

/// Accept/reject pair as stored in the grid.
pub(crate) type Cell = (i16, i16);

/// Not-applicable cell.
pub(crate) const NA: Cell = (-1, -1);

/// AQL column values, in percent nonconforming (or nonconformities per
/// hundred units above 10).
pub const AQL_VALUES: [f64; 26] = [
    0.010, 0.015, 0.025, 0.040, 0.065, 0.10, 0.15, 0.25, 0.40, 0.65, 1.0, 1.5, 2.5, 4.0, 6.5,
    10.0, 15.0, 25.0, 40.0, 65.0, 100.0, 150.0, 250.0, 400.0, 650.0, 1000.0,
];

/// Lot-size rows: `(min, max, [S-1, S-2, S-3, S-4, I, II, III])`.
pub(crate) static CODE_LETTERS: [(u64, u64, [CodeLetter; 7]); 15] = [
    (2, 8, [A, A, A, A, A, A, B]),
    (9, 15, [A, A, A, A, A, B, C]),
    (16, 25, [A, A, B, B, B, C, D]),
    (26, 50, [A, B, B, C, C, D, E]),
    (51, 90, [B, B, C, C, C, E, F]),
    (91, 150, [B, B, C, D, D, F, G]),
    (151, 280, [B, C, D, E, E, G, H]),
    (281, 500, [B, C, D, E, F, H, J]),
    (501, 1200, [C, C, E, F, G, J, K]),
    (1201, 3200, [C, D, E, G, H, K, L]),
    (3201, 10_000, [C, D, F, G, J, L, M]),
    (10_001, 35_000, [C, D, F, H, K, M, N]),
    (35_001, 150_000, [D, E, G, J, L, N, P]),
    (150_001, 500_000, [D, E, G, J, M, P, Q]),
    (500_001, u64::MAX, [D, E, H, K, N, Q, R]),
];

/// Accept/reject numbers; rows A..R in [`CodeLetter`] order, columns as
/// [`AQL_VALUES`].
pub(crate) static ACCEPT_REJECT: [[Cell; 26]; 16] = [
    // A
    [
        NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, (0, 1), (1, 2), (2, 3), (3, 4),
        (5, 6), (7, 8), (10, 11), (14, 15), (21, 22), (30, 31), (44, 45), NA,
    ],
    // B
    [
        NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, (0, 1), (1, 2), (2, 3), (3, 4), (5, 6),
        (7, 8), (10, 11), (14, 15), (21, 22), (30, 31), (44, 45), NA, NA,
    ],
    // C
    [
        NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, (0, 1), (1, 2), (2, 3), (3, 4), (5, 6),
        (7, 8), (10, 11), (14, 15), (21, 22), (30, 31), (44, 45), NA, NA, NA,
    ],
    // D
    [
        NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, (0, 1), (1, 2), (2, 3), (3, 4), (5, 6), (7, 8),
        (10, 11), (14, 15), (21, 22), (30, 31), (44, 45), NA, NA, NA, NA,
    ],
    // E
    [
        NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, (0, 1), (1, 2), (2, 3), (3, 4), (5, 6), (7, 8),
        (10, 11), (14, 15), (21, 22), (30, 31), (44, 45), NA, NA, NA, NA, NA,
    ],
    // F
    [
        NA, NA, NA, NA, NA, NA, NA, NA, NA, (0, 1), (1, 2), (2, 3), (3, 4), (5, 6), (7, 8),
        (10, 11), (14, 15), (21, 22), NA, NA, NA, NA, NA, NA, NA, NA,
    ],
    // G
    [
        NA, NA, NA, NA, NA, NA, NA, NA, (0, 1), (1, 2), (2, 3), (3, 4), (5, 6), (7, 8), (10, 11),
        (14, 15), (21, 22), NA, NA, NA, NA, NA, NA, NA, NA, NA,
    ],
    // H
    [
        NA, NA, NA, NA, NA, NA, NA, (0, 1), (1, 2), (2, 3), (3, 4), (5, 6), (7, 8), (10, 11),
        (14, 15), (21, 22), NA, NA, NA, NA, NA, NA, NA, NA, NA, NA,
    ],
    // J
    [
        NA, NA, NA, NA, NA, NA, (0, 1), (1, 2), (2, 3), (3, 4), (5, 6), (7, 8), (10, 11), (14, 15),
        (21, 22), NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA,
    ],
    // K
    [
        NA, NA, NA, NA, NA, (0, 1), (1, 2), (2, 3), (3, 4), (5, 6), (7, 8), (10, 11), (14, 15),
        (21, 22), NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA,
    ],
    // L
    [
        NA, NA, NA, NA, (0, 1), (1, 2), (2, 3), (3, 4), (5, 6), (7, 8), (10, 11), (14, 15),
        (21, 22), NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA,
    ],
    // M
    [
        NA, NA, NA, (0, 1), (1, 2), (2, 3), (3, 4), (5, 6), (7, 8), (10, 11), (14, 15), (21, 22),
        NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA,
    ],
    // N
    [
        NA, NA, (0, 1), (1, 2), (2, 3), (3, 4), (5, 6), (7, 8), (10, 11), (14, 15), (21, 22), NA,
        NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA,
    ],
    // P
    [
        NA, (0, 1), (1, 2), (2, 3), (3, 4), (5, 6), (7, 8), (10, 11), (14, 15), (21, 22), NA, NA,
        NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA,
    ],
    // Q
    [
        (0, 1), (1, 2), (2, 3), (3, 4), (5, 6), (7, 8), (10, 11), (14, 15), (21, 22), NA, NA, NA,
        NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA,
    ],
    // R
    [
        (1, 2), (2, 3), (3, 4), (5, 6), (7, 8), (10, 11), (14, 15), (21, 22), NA, NA, NA, NA, NA,
        NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA, NA,
    ],
];
