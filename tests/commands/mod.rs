mod test_architect;
mod test_ask;
mod test_search;
