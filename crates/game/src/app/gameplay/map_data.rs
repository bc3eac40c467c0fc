use super::map::Grid;

pub(crate) const SCREEN_0_PLAN: Grid = [
    [ 1,  1,  1,  1,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1,  5,  1],
    [ 1,  1,  1,  1,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1],
    [ 1,  1,  1,  1,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  4,  1],
    [ 1,  1,  1,  1,  1,  5,  5,  5,  5,  5,  5,  5,  5,  3,  5,  1],
    [ 1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  5,  5,  2,  3,  5,  0],
    [ 1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  4,  5,  0],
    [ 1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  2,  3,  1],
    [ 1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1],
    [ 1,  1,  1,  1,  1,  1,  1,  0,  0,  0,  0,  1,  1,  1,  1,  1],
];

pub(crate) const SCREEN_0_PROPS: Grid = [
    [ 1,  1,  8,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1],
    [ 1,  0,  0,  0,  0,  0,  6,  0,  0,  0,  0,  0,  0,  0,  0,  1],
    [ 1,  0,  0,  0,  0,  0,  3,  0,  0,  0,  3,  0, 11,  0,  0,  1],
    [ 1,  0,  0,  0,  6,  0,  0,  0,  0,  0,  0,  0,  0,  7,  5,  1],
    [ 1,  0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  5,  1],
    [ 1,  0,  0,  0,  0,  0,  0,  0,  7,  0,  0,  7,  0,  0,  5,  1],
    [ 1,  0,  0,  0,  0,  4,  0,  4,  0,  4,  0,  0,  0,  0,  0,  1],
    [ 1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, 10],
    [ 1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1],
];

pub(crate) const SCREEN_1_PLAN: Grid = [
    [ 5,  5,  5,  5,  5,  5,  5,  1,  1,  5,  5,  5,  5,  5,  5,  1],
    [ 5,  5,  5,  5,  5,  5,  5,  5,  1,  1,  1,  5,  1,  5,  5,  1],
    [ 5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1,  5,  1,  5,  5,  1],
    [ 1,  1,  5,  5,  5,  5,  5,  5,  5,  5,  1,  5,  1,  5,  5,  1],
    [ 1,  1,  5,  5,  5,  5,  5,  5,  4,  4,  1,  5,  5,  5,  5,  1],
    [ 1,  1,  1,  5,  5,  5,  4,  2,  4,  5,  1,  1,  1,  5,  5,  1],
    [ 1,  1,  1,  1,  5,  5,  5,  5,  5,  5,  5,  5,  1,  5,  5,  0],
    [ 1,  1,  1,  1,  5,  5,  5,  5,  5,  5,  5,  5,  1,  1,  5,  1],
    [ 1,  1,  1,  1,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1,  5,  1],
];

pub(crate) const SCREEN_1_PROPS: Grid = [
    [ 1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1],
    [ 0,  0,  0,  4,  4,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  1],
    [ 0,  0,  0,  4,  4,  0,  0,  0,  2,  2,  0,  0,  0,  0,  5,  1],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  5,  1],
    [ 0,  0,  0,  0,  2,  0,  0,  0,  2,  0,  5,  0,  0,  0,  0,  9],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0,  5,  5,  0,  0,  0,  0,  1],
    [ 0,  0,  2,  0,  0,  0,  5,  5,  5,  5,  0,  0,  0,  0,  0,  1],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  1],
    [ 1,  1,  0,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1],
];

pub(crate) const SCREEN_2_PLAN: Grid = [
    [ 3,  4,  3,  3,  4,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1],
    [ 4,  5,  5,  5,  3,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1],
    [ 4,  5,  4,  3,  3,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1,  1],
    [ 3,  0,  0,  0,  3,  5,  5,  5,  5,  5,  5,  5,  1,  1,  1,  1],
    [ 3,  3,  3,  3,  3,  5,  5,  5,  5,  5,  5,  5,  5,  1,  1,  1],
    [ 4,  4,  3,  4,  4,  5,  5,  5,  5,  5,  5,  5,  1,  1,  1,  1],
    [ 4,  2,  4,  4,  4,  4,  4,  4,  4,  5,  5,  2,  2,  2,  1,  1],
    [ 4,  4,  4,  3,  4,  4,  4,  2,  4,  4,  4,  4,  4,  2,  1,  1],
    [ 4,  4,  4,  4,  4,  2,  4,  4,  4,  4,  4,  2,  4,  4,  4,  1],
];

pub(crate) const SCREEN_2_PROPS: Grid = [
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  3],
    [ 0,  5,  5,  5,  0,  0,  0,  6,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  5, 12,  0,  7,  0,  0,  4,  0,  4,  0,  4,  0,  0,  2,  0],
    [ 0,  5,  5,  5,  0,  0,  0,  6,  0,  0,  0,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  2,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  2,  0,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  2,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  2,  0],
    [ 0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  1],
];

pub(crate) const SCREEN_3_PLAN: Grid = [
    [ 5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1],
    [ 5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1],
    [ 5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1],
    [ 5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1,  1],
    [ 5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1,  1,  1],
    [ 5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1,  1,  1,  1],
    [ 5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1,  1,  1,  1,  1,  1],
    [ 5,  5,  5,  5,  5,  5,  5,  5,  5,  1,  1,  1,  1,  1,  1,  1],
    [ 5,  5,  5,  5,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1,  1],
];

pub(crate) const SCREEN_3_PROPS: Grid = [
    [ 1,  0,  0,  0,  0,  6,  0,  0,  0,  0,  0,  0,  6,  0,  0,  0],
    [ 1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  5,  0, 13,  0,  0],
    [ 1,  0,  0,  0,  5,  5,  0,  0,  0,  0,  5,  5,  0,  0,  0,  0],
    [ 1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  5,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  7,  0,  0,  0,  0,  0,  0,  5,  0,  0,  0,  0,  0],
    [ 1,  0,  0,  0,  5,  0,  0,  0,  0,  0,  0,  0,  0,  4,  7,  0],
    [ 1,  0,  0,  0,  5,  0,  0,  0,  6,  0,  0,  0,  0,  0,  0,  0],
    [ 1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  4,  0,  0,  0,  0],
    [ 1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0],
];

pub(crate) const SCREEN_4_PLAN: Grid = [
    [ 5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1,  1,  1,  1],
    [ 5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1,  1,  1,  1],
    [ 5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1,  1,  1,  1],
    [ 5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1,  1,  1,  1],
    [ 5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1,  1,  1,  5],
    [ 5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  1,  5,  5],
    [ 5,  5,  3,  5,  2,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5],
    [ 3,  2,  4,  4,  3,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5],
    [ 5,  4,  3,  3,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5,  5],
];

pub(crate) const SCREEN_4_PROPS: Grid = [
    [ 1,  0,  0,  0,  0,  0,  0,  0,  0,  5,  5,  0,  0,  0,  0,  0],
    [ 1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  5,  0,  0, 14,  0,  0],
    [ 1,  0,  0,  0,  0,  0,  5,  0,  0,  0,  5,  0,  0,  4,  4,  0],
    [ 1,  0,  0,  0,  0,  0,  5,  0,  0,  0,  5,  0,  0,  4,  4,  0],
    [ 1,  0,  0,  0,  0,  0,  5,  0,  0,  0,  5,  0,  0,  4,  4,  0],
    [ 1,  0,  0,  0,  0,  0,  5,  0,  0,  0,  5,  0,  0,  0,  0,  0],
    [ 1,  0,  0,  0,  0,  5,  5,  0,  0,  0,  5,  0,  0,  0,  0,  0],
    [ 0,  0,  0,  0,  0,  5,  5,  0,  0,  0,  0,  0,  0,  0,  0,  5],
    [ 1,  0,  0,  0,  5,  5,  5,  0,  0,  0,  0,  0,  0,  0,  5,  5],
];
