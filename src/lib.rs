//! Core library for the insee-population command line application.
//!
//! The library loads INSEE population estimate workbooks into SQLite and
//! checks the stored totals against published figures. Cell geometry per
//! dataset and year lives in [`insee::population::layout`], the cell-to-record
//! walk in [`insee::population::extract`], spreadsheet and database adapters
//! under [`insee::population::io`], and the two pipelines in
//! [`insee::population::import`] and [`insee::population::verify`].

pub mod insee;

pub use insee::population::{
    PopulationError, Result, config, error, extract, import, io, layout, model, progress,
    reference, sources, verify,
};
