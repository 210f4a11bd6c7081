pub mod lsp_tables;
