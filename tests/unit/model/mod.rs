mod test_responses;
mod test_retry;
