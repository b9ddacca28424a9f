pub mod khandyga;
