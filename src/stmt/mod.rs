//! # Statement Catalog
//!
//! Concrete statement kinds built on the extension convention: each kind is
//! a `'static` [`StatementDef`](crate::node::StatementDef) singleton with a
//! fixed operand shape, a special-syntax operator, and its own unparse
//! routine. Nothing in the dispatch core knows these kinds exist; removing
//! a file here removes the statement.
//!
//! | Statement | Surface syntax |
//! |-----------|----------------|
//! | [`AlterTableRename`] | `ALTER TABLE t RENAME TO u` |
//! | [`AlterTableRenameColumn`] | `ALTER TABLE t RENAME COLUMN a TO b` |
//! | [`AlterTableDropColumn`] | `ALTER TABLE t DROP COLUMN a, DROP COLUMN b` |
//! | [`TruncateTable`] | `TRUNCATE TABLE t` |
//! | [`DropObject`] | `DROP TABLE [IF EXISTS] t`, `DROP MODEL [IF EXISTS] m` |
//! | [`Show`] | `SHOW TABLES`, `SHOW MODELS` |
//! | [`ShowSql`] | `SHOW SQL m` |
//! | [`ShowTrainModel`] | `SHOW TRAIN MODEL m` |
//! | [`TrainModel`] | `TRAIN MODEL m (k v, ...) SELECT ...` |
//! | [`RegisterModel`] | `REGISTER MODEL m AS f` |
//! | [`Select`] | `SELECT cols FROM t [WHERE pred]` |
//! | [`SortBy`] | `q SORT BY keys [OFFSET n ROWS] [FETCH NEXT n ROWS ONLY]` |

mod alter_table;
mod drop;
mod register_model;
mod select;
mod show;
mod sort_by;
mod train_model;
mod truncate;

pub use alter_table::{
    AlterTableDropColumn, AlterTableRename, AlterTableRenameColumn, ALTER_TABLE_DROP_COLUMN,
    ALTER_TABLE_RENAME, ALTER_TABLE_RENAME_COLUMN,
};
pub use drop::{DropObject, DROP_MODEL, DROP_MODEL_IF_EXISTS, DROP_TABLE, DROP_TABLE_IF_EXISTS};
pub use register_model::{RegisterModel, REGISTER_MODEL};
pub use select::{Select, SELECT};
pub use show::{
    Show, ShowSql, ShowTrainModel, SHOW_MODELS, SHOW_SQL, SHOW_TABLES, SHOW_TRAIN_MODEL,
};
pub use sort_by::{SortBy, SORT_BY};
pub use train_model::{ModelOption, TrainModel, MODEL_OPTION, TRAIN_MODEL};
pub use truncate::{TruncateTable, TRUNCATE_TABLE};
