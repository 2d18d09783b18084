//! Core building blocks: conversion parameters, date recognition, table
//! normalization, and column renaming. These are internal primitives
//! consumed by the high-level `api` module.
pub mod dates;
pub mod normalize;
pub mod params;
pub mod rename;
