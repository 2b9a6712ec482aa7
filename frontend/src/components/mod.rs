pub mod dynamic_form;
