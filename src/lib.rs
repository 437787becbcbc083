pub mod dump_io;
pub mod merge_join;
pub mod report;
pub mod stat_record;
