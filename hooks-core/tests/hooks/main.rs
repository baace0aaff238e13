mod http_fetcher;
mod list;
mod storage;
mod viewport;
