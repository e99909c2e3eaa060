pub mod a001_inquiry;
