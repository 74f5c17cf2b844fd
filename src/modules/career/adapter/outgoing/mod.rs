mod career_query_postgres;

pub use career_query_postgres::CareerQueryPostgres;
