pub mod airtable;
