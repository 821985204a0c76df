pub mod layout;
pub mod query;
pub mod record;

pub use layout::{ColumnKind, OutputColumn};
pub use query::{CompanyStats, CountryCount, FranchiseStats, MonthCount, TitleReturn, WeekdayCount};
pub use record::{MovieRecord, NamedRef};
